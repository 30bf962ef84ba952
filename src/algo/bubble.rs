use crate::core::{Comparator, compare_elements};

/// Pass `i` bubbles the largest element of the unsorted prefix `[0, n - i)`
/// into its final slot.
pub(crate) fn sort<T, C>(data: &mut [T], cmp: &C)
where
    T: AsRef<[u8]>,
    C: Comparator + ?Sized,
{
    let len = data.len();
    for pass in 1..len {
        for j in 0..len - pass {
            if compare_elements(cmp, &data[j], &data[j + 1]).is_gt() {
                data.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ascending, descending};

    #[test]
    fn sorts_reversed_input() {
        let mut data = vec!["e", "d", "c", "b", "a"];
        sort(&mut data, &ascending);
        assert_eq!(data, ["a", "b", "c", "d", "e"]);

        sort(&mut data, &descending);
        assert_eq!(data, ["e", "d", "c", "b", "a"]);
    }

    #[test]
    fn equal_neighbours_are_never_swapped() {
        let first = String::from("same");
        let second = String::from("same");
        let (p1, p2) = (first.as_ptr(), second.as_ptr());

        let mut data = vec![String::from("zzz"), first, second];
        sort(&mut data, &ascending);

        assert_eq!(data[0].as_ptr(), p1);
        assert_eq!(data[1].as_ptr(), p2);
    }

    #[test]
    fn tiny_inputs() {
        let mut empty: Vec<&str> = vec![];
        sort(&mut empty, &ascending);
        assert!(empty.is_empty());

        let mut one = vec!["only"];
        sort(&mut one, &ascending);
        assert_eq!(one, ["only"]);
    }
}
