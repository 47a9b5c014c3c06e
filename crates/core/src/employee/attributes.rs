//! Attribute names shared by the wire format, the stored items and the
//! table schema.

pub const LOGIN_ALIAS: &str = "login_alias";
pub const FIRST_NAME: &str = "first_name";
pub const LAST_NAME: &str = "last_name";
pub const MANAGER_LOGIN_ALIAS: &str = "manager_login_alias";
pub const DESIGNATION: &str = "designation";
pub const SKILLS: &str = "skills";
