/// Study-level context shared by every image in a display set
///
/// Owned by the caller and never mutated by the registry. The registry
/// shares it into metadata records, where overlay and reference-line
/// logic reads it back per image id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Study {
    /// Study Instance UID
    pub study_instance_uid: String,

    /// Study description, if known
    pub study_description: Option<String>,

    /// Patient ID, if known
    pub patient_id: Option<String>,
}

impl Study {
    /// Creates a study with only its UID set
    pub fn new(study_instance_uid: impl Into<String>) -> Self {
        Self {
            study_instance_uid: study_instance_uid.into(),
            study_description: None,
            patient_id: None,
        }
    }

    /// Sets the study description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.study_description = Some(description.into());
        self
    }

    /// Sets the patient ID
    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }
}
