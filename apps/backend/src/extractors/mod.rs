pub mod article_id;
pub mod validated_json;

pub use article_id::ArticleId;
pub use validated_json::ValidatedJson;
