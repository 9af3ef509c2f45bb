mod answer_cache;
mod upstream_resolver;

pub use answer_cache::AnswerCache;
pub use upstream_resolver::UpstreamResolver;
