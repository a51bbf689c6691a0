pub mod package_lookup;

pub use package_lookup::fetch_packages_by_id;
