pub mod support;

mod http_adapters;
