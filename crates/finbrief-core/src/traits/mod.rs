mod embedding;
mod summary_generator;
mod vector_index;

pub use embedding::IEmbeddingProvider;
pub use summary_generator::ISummaryGenerator;
pub use vector_index::IVectorIndex;
