pub mod electricity;
pub mod gst;
pub mod income_tax;
pub mod sip;
pub mod water;
