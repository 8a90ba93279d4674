// Individual normalizer implementations
pub mod fauske_kommune;
pub mod fauskenf;

pub use fauske_kommune::FauskeKommuneNormalizer;
pub use fauskenf::FauskenfNormalizer;
