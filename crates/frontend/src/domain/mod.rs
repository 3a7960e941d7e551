pub mod a025_category;
