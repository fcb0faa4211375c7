use super::amino_acid::AminoAcid;
use super::sequence::Sequence;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Occurrence count of each standard amino acid in a sequence.
///
/// Counts always sum to [`Composition::len`], which is at least 1 for a
/// composition built from a [`Sequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    counts: [usize; AminoAcid::COUNT],
    length: usize,
}

impl Composition {
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let mut counts = [0usize; AminoAcid::COUNT];
        for aa in sequence.iter() {
            counts[aa.index()] += 1;
        }
        Self {
            counts,
            length: sequence.len(),
        }
    }

    /// Builds a composition directly from counts, e.g. for a hypothetical
    /// protein. Returns `None` if every count is zero.
    pub fn from_counts(counts: [usize; AminoAcid::COUNT]) -> Option<Self> {
        let length = counts.iter().sum();
        (length > 0).then_some(Self { counts, length })
    }

    pub fn count(&self, aa: AminoAcid) -> usize {
        self.counts[aa.index()]
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn fraction(&self, aa: AminoAcid) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        self.count(aa) as f64 / self.length as f64
    }

    pub fn percent(&self, aa: AminoAcid) -> f64 {
        self.fraction(aa) * 100.0
    }

    /// `(amino acid, count)` pairs in one-letter-code order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        AminoAcid::ALL.iter().map(|&aa| (aa, self.count(aa)))
    }

    /// `(amino acid, percentage)` pairs in one-letter-code order.
    pub fn percentages(&self) -> impl Iterator<Item = (AminoAcid, f64)> + '_ {
        AminoAcid::ALL.iter().map(|&aa| (aa, self.percent(aa)))
    }
}

#[derive(serde::Serialize)]
struct CompositionEntry {
    count: usize,
    fraction: f64,
}

impl Serialize for Composition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AminoAcid::COUNT))?;
        for (aa, count) in self.iter() {
            map.serialize_entry(
                &aa.code(),
                &CompositionEntry {
                    count,
                    fraction: self.fraction(aa),
                },
            )?;
        }
        map.end()
    }
}
