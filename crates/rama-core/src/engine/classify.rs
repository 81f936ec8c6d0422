use crate::core::models::angle::AngleRecord;
use crate::core::models::residue::ResidueClass;

/// Angle records partitioned into the three Ramachandran populations.
///
/// Each group keeps the relative order of the records it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedAngles {
    pub general: Vec<AngleRecord>,
    pub glycine: Vec<AngleRecord>,
    pub proline: Vec<AngleRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts {
    pub general: usize,
    pub glycine: usize,
    pub proline: usize,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.general + self.glycine + self.proline
    }
}

impl ClassifiedAngles {
    pub fn group(&self, class: ResidueClass) -> &[AngleRecord] {
        match class {
            ResidueClass::General => &self.general,
            ResidueClass::Glycine => &self.glycine,
            ResidueClass::Proline => &self.proline,
        }
    }

    fn group_mut(&mut self, class: ResidueClass) -> &mut Vec<AngleRecord> {
        match class {
            ResidueClass::General => &mut self.general,
            ResidueClass::Glycine => &mut self.glycine,
            ResidueClass::Proline => &mut self.proline,
        }
    }

    pub fn counts(&self) -> ClassCounts {
        ClassCounts {
            general: self.general.len(),
            glycine: self.glycine.len(),
            proline: self.proline.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }

    /// Groups in the fixed order general, glycine, proline.
    pub fn iter_groups(&self) -> impl Iterator<Item = (ResidueClass, &[AngleRecord])> {
        ResidueClass::ALL
            .into_iter()
            .map(move |class| (class, self.group(class)))
    }
}

impl Extend<AngleRecord> for ClassifiedAngles {
    fn extend<I: IntoIterator<Item = AngleRecord>>(&mut self, iter: I) {
        for record in iter {
            self.group_mut(record.class()).push(record);
        }
    }
}

impl FromIterator<AngleRecord> for ClassifiedAngles {
    fn from_iter<I: IntoIterator<Item = AngleRecord>>(iter: I) -> Self {
        let mut classified = ClassifiedAngles::default();
        classified.extend(iter);
        classified
    }
}

/// Splits angle records into general, glycine and proline groups by residue name.
pub fn classify(angles: impl IntoIterator<Item = AngleRecord>) -> ClassifiedAngles {
    angles.into_iter().collect()
}
