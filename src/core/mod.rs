pub mod dotscene;
