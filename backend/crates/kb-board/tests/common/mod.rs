
#[allow(unused_imports)]
pub use fake_store::*;
