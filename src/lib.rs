//! git-credential-1password - a git credential helper backed by 1Password.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # stderr reporting
//! └── core/             # Core library components
//!     ├── config        # Prefix, account/vault selectors, op path
//!     ├── protocol      # git credential key=value protocol
//!     ├── naming        # host -> item name
//!     ├── item          # decoded `op item get` fields
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   └── op        # 1Password CLI implementation
//!     └── dispatch      # get / store / erase
//! ```
//!
//! # Usage
//!
//! ```text
//! git config --global credential.helper '1password --vault Git'
//! ```

pub mod cli;
pub mod core;
pub mod error;
