//! Product cipher - keyed substitution composed with columnar transposition
//!
//! An educational classical cipher. It is not secure and must not be used
//! to protect real data.
//!
//! ```
//! use product_cipher::{decrypt, encrypt, explode};
//!
//! let ciphertext = encrypt("HELLOWORLD", "KEY", Some(3)).unwrap();
//! assert_eq!(ciphertext, "RVYNISVJUJ");
//! assert_eq!(explode(&ciphertext), "RVYNI SVJUJ");
//! assert_eq!(decrypt(&ciphertext, "KEY", Some(3)).unwrap(), "HELLOWORLD");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod file_ops;
pub mod grouping;
pub mod input;
pub mod key_reader;
pub mod product;
pub mod substitution;
pub mod transposition;

pub use error::{CipherError, ErrorCategory, ErrorKind, Field, FieldError, Result};
pub use grouping::explode;
pub use input::{CipherInput, Options};
pub use product::{decrypt, encrypt};
