//! Keyword occurrences and frequency-ordered posting lists.

use std::ops::Deref;

/// A record indicating that a particular document contains some keyword,
/// and how many times it appears there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Identifier of the document, as given in the document list.
    pub document: String,
    /// Number of times the keyword appears in the document.
    pub frequency: u32,
}

impl Occurrence {
    /// A fresh occurrence, as created the first time a keyword is seen in a document.
    pub fn new<S: Into<String>>(document: S, frequency: u32) -> Occurrence {
        Occurrence {
            document: document.into(),
            frequency,
        }
    }
}

/// All the occurrences of one keyword, highest frequency first.
///
/// The list never holds two occurrences for the same document, and is
/// only ever grown through [`PostingList::insert`], so it stays sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList(Vec<Occurrence>);

impl PostingList {
    /// An empty posting list.
    pub fn new() -> PostingList {
        PostingList(vec![])
    }

    /// Add `occurrence` in its sorted position.
    ///
    /// Returns the midpoints probed by the binary search; see
    /// [`insert_last`].
    pub fn insert(&mut self, occurrence: Occurrence) -> Vec<usize> {
        self.0.push(occurrence);
        insert_last(&mut self.0)
    }

    /// Consume the list, yielding the occurrences in rank order.
    pub fn into_vec(self) -> Vec<Occurrence> {
        self.0
    }
}

impl Deref for PostingList {
    type Target = [Occurrence];

    fn deref(&self) -> &[Occurrence] {
        &self.0
    }
}

/// Move the last element of `occs` into place.
///
/// `occs[..n-1]` must already be in non-increasing order of frequency; the
/// last element is the newly appended occurrence. A binary search over
/// `0..=n-2` finds its slot, and the tail is rotated to make room, so the
/// whole slice ends up non-increasing.
///
/// When a probe lands on an entry with the same frequency the search stops
/// there and the new occurrence goes right after that entry.
///
/// Returns the sequence of midpoints the search probed, followed by the
/// insertion index when the search ended without an equal probe and that
/// index was not itself the last probe. The trace is empty for slices
/// shorter than two.
pub fn insert_last(occs: &mut [Occurrence]) -> Vec<usize> {
    let mut probes = vec![];
    let Some((new, sorted)) = occs.split_last() else {
        return probes;
    };
    if sorted.is_empty() {
        return probes;
    }

    let target = new.frequency;
    let mut low = 0;
    let mut high = sorted.len() - 1;
    let mut equal = false;
    let slot = loop {
        let mid = (low + high) / 2;
        probes.push(mid);
        let probed = sorted[mid].frequency;
        if probed == target {
            equal = true;
            break mid + 1;
        } else if probed < target {
            // Belongs to the left of `mid`.
            if mid == 0 {
                break 0;
            }
            high = mid - 1;
        } else {
            low = mid + 1;
        }
        if low > high {
            break low;
        }
    };

    if !equal && probes.last() != Some(&slot) {
        probes.push(slot);
    }
    occs[slot..].rotate_right(1);
    probes
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn occs(freqs: &[u32]) -> Vec<Occurrence> {
        freqs
            .iter()
            .enumerate()
            .map(|(i, &f)| Occurrence::new(format!("doc{i}"), f))
            .collect()
    }

    fn freqs(occs: &[Occurrence]) -> Vec<u32> {
        occs.iter().map(|o| o.frequency).collect()
    }

    fn is_non_increasing(occs: &[Occurrence]) -> bool {
        occs.windows(2).all(|w| w[0].frequency >= w[1].frequency)
    }

    #[test]
    fn single_element_needs_no_search() {
        let mut list = occs(&[4]);
        assert!(insert_last(&mut list).is_empty());
        assert_eq!(freqs(&list), vec![4]);

        let mut empty: Vec<Occurrence> = vec![];
        assert!(insert_last(&mut empty).is_empty());
    }

    #[test]
    fn goes_to_the_front() {
        let mut list = occs(&[12, 8, 7, 5, 3, 2, 20]);
        let probes = insert_last(&mut list);
        assert_eq!(freqs(&list), vec![20, 12, 8, 7, 5, 3, 2]);
        assert_eq!(probes, vec![2, 0]);
        assert_eq!(list[0].document, "doc6");
    }

    #[test]
    fn goes_to_the_back() {
        let mut list = occs(&[12, 8, 7, 5, 3, 2, 1]);
        let probes = insert_last(&mut list);
        assert_eq!(freqs(&list), vec![12, 8, 7, 5, 3, 2, 1]);
        assert_eq!(probes, vec![2, 4, 5, 6]);
        assert_eq!(list[6].document, "doc6");
    }

    #[test]
    fn goes_in_the_middle() {
        let mut list = occs(&[12, 8, 7, 5, 3, 2, 6]);
        let probes = insert_last(&mut list);
        assert_eq!(freqs(&list), vec![12, 8, 7, 6, 5, 3, 2]);
        assert_eq!(probes, vec![2, 4, 3]);
        assert_eq!(list[3].document, "doc6");
    }

    #[test]
    fn equal_probe_stops_the_search() {
        let mut list = occs(&[12, 8, 7, 5, 3, 2, 7]);
        let probes = insert_last(&mut list);
        assert_eq!(probes, vec![2]);
        assert_eq!(list[2].document, "doc2");
        assert_eq!(list[3].document, "doc6");
    }

    #[test]
    fn equal_frequency_stays_behind_existing_entry() {
        let mut list = PostingList::new();
        list.insert(Occurrence::new("docA", 5));
        let probes = list.insert(Occurrence::new("docB", 5));
        assert_eq!(probes, vec![0]);
        assert_eq!(
            list.into_vec(),
            vec![Occurrence::new("docA", 5), Occurrence::new("docB", 5)]
        );
    }

    #[quickcheck]
    fn keeps_order_and_contents(mut sorted: Vec<u8>, new: u8) -> bool {
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let mut input: Vec<u32> = sorted.into_iter().map(u32::from).collect();
        input.push(u32::from(new));
        let mut list = occs(&input);
        let probes = insert_last(&mut list);

        let mut before = occs(&input);
        let mut after = list.clone();
        before.sort_by(|a, b| a.document.cmp(&b.document));
        after.sort_by(|a, b| a.document.cmp(&b.document));

        // One extra entry for the trailing insertion index.
        let max_probes = usize::BITS - input.len().leading_zeros() + 1;
        is_non_increasing(&list) && before == after && probes.len() <= max_probes as usize
    }
}
