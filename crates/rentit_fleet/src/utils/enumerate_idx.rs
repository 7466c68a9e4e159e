/// Like `Iterator::enumerate`, but yields a typed registry index instead of a raw `usize`.
pub struct IndexedIter<I, Idx> {
    inner: std::iter::Enumerate<I>,
    _marker: std::marker::PhantomData<Idx>,
}

pub trait EnumerateIdx<Idx>: Iterator + Sized {
    fn enumerate_idx(self) -> IndexedIter<Self, Idx> {
        IndexedIter {
            inner: self.enumerate(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<I: Iterator, Idx> EnumerateIdx<Idx> for I {}

impl<I: Iterator, Idx: From<usize>> Iterator for IndexedIter<I, Idx> {
    type Item = (Idx, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, item)| (Idx::from(i), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::fleet::vehicle::VehicleIdx;

    use super::*;

    #[test]
    fn test_enumerate_idx_skips_keep_positions() {
        let plates = ["A", "B", "C"];
        let kept: Vec<(VehicleIdx, &&str)> = plates
            .iter()
            .enumerate_idx()
            .filter(|(_, plate)| **plate != "B")
            .collect();

        assert_eq!(kept, vec![(VehicleIdx::new(0), &"A"), (VehicleIdx::new(2), &"C")]);
    }
}
