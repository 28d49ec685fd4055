//! # Kindling mf2 codec
//!
//! Converts between the mf2 JSON wire shape used by micropub requests and the
//! flat jf2 form ([`Jf2Document`]) the pipeline works in.
//!
//! The two shapes carry the same document structure:
//!
//! ```json
//! // mf2 (wire)
//! {"type": ["h-cite"], "properties": {"name": ["Example"]}}
//!
//! // jf2 (canonical)
//! {"type": "cite", "name": "Example"}
//! ```
//!
//! The transform is lossless for documents this pipeline produces:
//! `decode(encode(doc)) == doc` and `encode(decode(wire)) == wire`.

pub mod codec;
pub mod error;

pub use codec::{decode, encode};
pub use error::{CodecError, CodecResult};
