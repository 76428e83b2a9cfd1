pub mod logical_props;
pub mod navbar;

pub use logical_props::LogicalPropsPass;
pub use navbar::NavbarPass;
