// Purpose - output encoding, format conversions

pub mod wav;
