//! # xsdbind
//!
//! Typed XML data bindings for cultural-heritage metadata vocabularies.
//!
//! The crate pairs a small descriptor-driven marshal/unmarshal engine with
//! declarative type modules for the vocabularies that show up around
//! museum object records:
//!
//! - LIDO (Lightweight Information Describing Objects)
//! - METS (Metadata Encoding and Transmission Standard)
//! - GML geometry (for place georeferences)
//! - Getty AAT subject records over RDF/RDFS
//! - XML-DSIG key information and XML-ENC encrypted data
//! - XLink and XML core attribute groups
//!
//! ## Example
//!
//! ```rust
//! use xsdbind::lido;
//!
//! let mut record = lido::Lido::default();
//! record.append_rec_id(
//!     "Bildarchiv Foto Marburg",
//!     lido::LOCAL_RECORD_TYPE,
//!     "DE-Mb112/lido-obj00154983",
//! );
//! let xml = xsdbind::marshal(&record).unwrap();
//! let parsed: lido::Lido = xsdbind::unmarshal(&xml).unwrap();
//! assert_eq!(record, parsed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod error;
pub mod namespaces;
pub mod xsdt;

// Binding engine
pub mod binding;

// Attribute-group vocabularies
pub mod xlink;
pub mod xml;

// RDF plumbing for the Getty vocabularies
pub mod rdf;
pub mod rdfs;

// Record vocabularies
pub mod aat;
pub mod dsig;
pub mod gml;
pub mod lido;
pub mod mets;
pub mod xmlenc;

// Re-exports for convenience
pub use binding::{
    marshal, marshal_fragment, unmarshal, unmarshal_checked, unmarshal_fragment,
    unmarshal_fragment_checked, BindChoice, BindRecord, Root,
};
pub use error::{Error, Result, Violation, ViolationKind};
pub use namespaces::QName;

/// Version of the xsdbind library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
