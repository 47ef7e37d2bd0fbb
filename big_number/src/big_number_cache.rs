use lazy_static::*;

use crate::BigNumber;
use crate::big_number_constants::*;

lazy_static! {
    pub static ref SMALL_CACHE: [BigNumber; MAX_CONSTANT + 1] = [
        BigNumber::from_raw(vec![0]   ),
        BigNumber::from_raw(vec![1]   ),
        BigNumber::from_raw(vec![2]   ),
        BigNumber::from_raw(vec![3]   ),
        BigNumber::from_raw(vec![4]   ),
        BigNumber::from_raw(vec![5]   ),
        BigNumber::from_raw(vec![6]   ),
        BigNumber::from_raw(vec![7]   ),
        BigNumber::from_raw(vec![8]   ),
        BigNumber::from_raw(vec![9]   ),
        BigNumber::from_raw(vec![0, 1]),
        BigNumber::from_raw(vec![1, 1]),
        BigNumber::from_raw(vec![2, 1]),
        BigNumber::from_raw(vec![3, 1]),
        BigNumber::from_raw(vec![4, 1]),
        BigNumber::from_raw(vec![5, 1]),
        BigNumber::from_raw(vec![6, 1]),
    ];
}

#[test]
fn test_small_cache() {
    for (i, n) in SMALL_CACHE.iter().enumerate() {
        assert_eq!(n.to_string(), i.to_string());
    }
}
