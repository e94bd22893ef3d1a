mod common;
mod reports;
mod routing;
