#[doc(no_inline)]
pub use crate::fasta::Record as _;
#[doc(no_inline)]
pub use crate::fastq::Record as _;
#[doc(no_inline)]
pub use crate::fastx::dynamic::{FastxReader as _, FastxSeekReader as _};
#[doc(no_inline)]
pub use crate::fastx::Record as _;
#[doc(no_inline)]
pub use crate::BaseRecord as _;
