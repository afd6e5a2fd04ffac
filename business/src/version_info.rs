//! Re-export of the shared build-time version info.

pub use quickqr_utils::version_info::{
    build_commit, build_date, build_version, env_version_info, format_env_version,
};
