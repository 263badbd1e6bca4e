pub mod dto;
pub mod error_mapper;
pub mod routes;

#[cfg(test)]
mod test_support;
