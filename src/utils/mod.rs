pub(crate) mod paths;

pub(crate) use paths::folder_name;
