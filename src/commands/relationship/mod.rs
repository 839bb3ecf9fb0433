//! Commands for marriages and everything a married couple can do.

pub mod couple;
pub mod divorce;
pub mod love;
pub mod marry;

pub use couple::check::run_prefix as check_prefix;
pub use couple::photo::run_prefix as addpic_prefix;
pub use divorce::run::run_prefix as divorce_prefix;
pub use love::run_prefix as love_prefix;
pub use marry::run::run_prefix as marry_prefix;
