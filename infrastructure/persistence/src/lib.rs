pub mod json_file;
pub mod dish {
    pub mod entity;
    pub mod repository;
}
pub mod history {
    pub mod entity;
    pub mod repository;
}
