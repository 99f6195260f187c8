//! Atlas Module - shelf packing into fixed-size RGBA pages

// Data modules
pub mod atlas_page_data;
pub mod atlas_set_data;
pub mod packer_data;

// Operations modules
pub mod atlas_page_operations;
pub mod atlas_set_operations;
pub mod packer_operations;

pub use atlas_page_data::AtlasPageData;
pub use atlas_set_data::AtlasSetData;
pub use packer_data::{AtlasRect, ShelfPackerData};

pub use atlas_page_operations::{
    add_to_page, create_atlas_page, page_to_image, page_utilization, save_page_debug,
};
pub use atlas_set_operations::{
    add_to_set, create_atlas_set, create_atlas_set_from_config, page, page_count,
};
pub use packer_operations::{create_shelf_packer, rect_within, rects_overlap, try_place, utilization};
