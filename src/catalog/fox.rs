use crate::state::data::{ImageSource, Item};

/// Number of fox photos published by randomfox.ca
pub const FOX_COUNT: u32 = 51;

/// Image URL template; `{id}` is replaced on first visit
pub const FOX_IMAGE_TEMPLATE: &str = "https://randomfox.ca/images/{id}.jpg";

/// Generate `count` fox cards with ids 1..=count
pub fn fox_catalog(count: u32) -> Vec<Item> {
    (1..=count)
        .map(|id| {
            Item::new(
                id,
                format!("Fox #{id}"),
                ImageSource::Template(FOX_IMAGE_TEMPLATE.to_string()),
            )
        })
        .collect()
}
