mod common;
pub use self::common::{Query, QueryCommon};

mod search;
pub use self::search::SearchQuery;

mod translate;
pub use self::translate::TranslateQuery;

mod random;
pub use self::random::RandomQuery;

mod trending;
pub use self::trending::TrendingQuery;
