pub const DIGITS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9'
];

pub const RADIX: u32 = 10;

/// Largest value served from `SMALL_CACHE`.
pub const MAX_CONSTANT: usize = 16;

/// Enough digits for any `u128`.
pub const MAX_NATIVE_DIGITS: usize = 39;
