//! Section builders, one per declaration kind.
//!
//! Each builder filters the top-level declarations of one kind and lays them out as a
//! [`DocTree`](crate::markdown::DocTree): a level-2 heading followed by the per-declaration
//! blocks. The module header is the exception, opening the document with a level-1 title.
//!
//! | Section    | Heading           | Per declaration                                  |
//! |------------|-------------------|--------------------------------------------------|
//! | module     | `# <file>`        | quote per namespace, table-of-contents marker    |
//! | typedefs   | `## Types`        | `###` name, quote `<type> <name>`                |
//! | constants  | `## Constants`    | one row in a shared table                        |
//! | enums      | `## Enumerations` | `###` name, comment code block, member table     |
//! | structs    | `## Data Structures` | `###` name, comment code block, field table   |
//! | services   | `## Services`     | `###` name, `####` + signature quote per function |

pub mod constants;
pub mod enums;
pub mod module;
pub mod services;
pub mod structs;
pub mod typedefs;

pub use constants::transform_constants;
pub use enums::transform_enums;
pub use module::{document_title, transform_module};
pub use services::transform_services;
pub use structs::transform_structs;
pub use typedefs::transform_typedefs;
