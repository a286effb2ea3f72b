pub mod criteria;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod view;
