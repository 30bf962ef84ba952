use crate::core::{Comparator, compare_elements};

/// Straight insertion: the element at `i` is held in place while the scan
/// finds the first slot of the sorted prefix it must precede, then the
/// prefix tail shifts right by one and the held element drops into the gap.
///
/// Only a strictly smaller element moves past its left neighbour, so equal
/// elements keep their order.
pub(crate) fn sort<T, C>(data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && compare_elements(cmp, &data[i], &data[j - 1]).is_lt() {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}
