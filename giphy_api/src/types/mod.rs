mod meta;
pub use self::meta::{PaginatedResponse, Pagination};

mod gif;
pub use self::gif::{Gif, ImageMetadata, Rating, Rendition};
