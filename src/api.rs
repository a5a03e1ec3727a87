pub mod interface;

pub use interface::{AdminAPI, AuthAPI, CustomerAPI, DriverAPI, DynAPI, HotelAPI, API};
