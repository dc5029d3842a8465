//! Step machine for the citizen report wizard.
//!
//! Four steps, forward-only except for one back edge (Verify → Upload, the
//! "change photo" action). Advancing out of Verify is gated on the AI
//! labelling the photo as road damage. Validation responses are tagged with
//! an upload generation so the verdict for a superseded photo selection is
//! never applied.

use crate::{AiResult, DamageType, ValidateImageResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Upload,
    Verify,
    Details,
    Done,
}

impl WizardStep {
    /// 1-based position for the progress sidebar.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Upload => 1,
            WizardStep::Verify => 2,
            WizardStep::Details => 3,
            WizardStep::Done => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload Photo",
            WizardStep::Verify => "Detection & Location",
            WizardStep::Details => "Details",
            WizardStep::Done => "Confirmation",
        }
    }
}

/// Token identifying one photo selection. The validation verdict is only
/// applied when its token is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadToken(u64);

/// Everything the wizard knows between renders, minus the browser objects
/// (file handle, preview URL) which live in the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    has_photo: bool,
    upload_generation: u64,
    ai_result: Option<AiResult>,
    backend_error: bool,
    complaint_id: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Upload,
            has_photo: false,
            upload_generation: 0,
            ai_result: None,
            backend_error: false,
            complaint_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn has_photo(&self) -> bool {
        self.has_photo
    }

    pub fn ai_result(&self) -> Option<&AiResult> {
        self.ai_result.as_ref()
    }

    pub fn backend_error(&self) -> bool {
        self.backend_error
    }

    /// Identifier returned by the backend once submission succeeded.
    pub fn complaint_id(&self) -> Option<&str> {
        self.complaint_id.as_deref()
    }

    /// A photo was (re-)selected. Clears any previous verdict, marks earlier
    /// validation requests stale, and hands back the token the new request
    /// must carry.
    pub fn select_photo(&mut self) -> UploadToken {
        self.has_photo = true;
        self.upload_generation += 1;
        self.ai_result = None;
        self.backend_error = false;
        UploadToken(self.upload_generation)
    }

    /// Apply the outcome of the validation call. Returns `false` when the
    /// token is stale (the user picked another photo meanwhile).
    pub fn apply_validation(
        &mut self,
        token: UploadToken,
        outcome: Result<&ValidateImageResponse, ()>,
    ) -> bool {
        if token.0 != self.upload_generation {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.ai_result = Some(response.ai_result.clone());
                self.backend_error = false;
            }
            Err(()) => {
                self.ai_result = None;
                self.backend_error = true;
            }
        }
        true
    }

    /// Verdict pending: a photo is selected but neither a result nor an
    /// error has arrived.
    pub fn is_validating(&self) -> bool {
        self.has_photo && self.ai_result.is_none() && !self.backend_error
    }

    /// Gate for Verify → Details: the AI must have labelled the photo as road
    /// damage and the backend must be reachable.
    pub fn can_submit_details(&self) -> bool {
        !self.backend_error
            && self
                .ai_result
                .as_ref()
                .is_some_and(|ai| ai.is_damage_detected())
    }

    /// Damage type to pre-fill the details form with, taken from the AI's
    /// class when the detection was positive.
    pub fn prefill_damage_type(&self) -> Option<DamageType> {
        self.ai_result
            .as_ref()
            .filter(|ai| ai.is_damage_detected())
            .map(|ai| ai.damage_type.parse().unwrap_or_default())
    }

    /// Try to move one step forward. Returns the step actually reached.
    pub fn advance(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Upload if self.has_photo => WizardStep::Verify,
            WizardStep::Verify if self.can_submit_details() => WizardStep::Details,
            // Details only leaves via a successful submission; Done is terminal.
            other => other,
        };
        self.step
    }

    /// The single backward edge: Verify → Upload ("change photo"). Photo and
    /// verdict are kept so returning forward is cheap.
    pub fn back(&mut self) -> WizardStep {
        if self.step == WizardStep::Verify {
            self.step = WizardStep::Upload;
        }
        self.step
    }

    /// Submission succeeded: record the identifier and land on Done.
    pub fn complete(&mut self, complaint_id: String) {
        self.complaint_id = Some(complaint_id);
        self.step = WizardStep::Done;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AI_DAMAGE_DETECTED;

    fn detected(damage_type: &str) -> ValidateImageResponse {
        ValidateImageResponse {
            ai_result: AiResult {
                result: AI_DAMAGE_DETECTED.to_string(),
                damage_type: damage_type.to_string(),
                confidence: 0.9,
                bbox: Some([0.0, 0.0, 10.0, 10.0]),
            },
            gps_data: None,
        }
    }

    fn no_damage() -> ValidateImageResponse {
        ValidateImageResponse {
            ai_result: AiResult {
                result: "No Road Damage".to_string(),
                damage_type: String::new(),
                confidence: 0.0,
                bbox: None,
            },
            gps_data: None,
        }
    }

    #[test]
    fn cannot_leave_upload_without_a_photo() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.advance(), WizardStep::Upload);

        wizard.select_photo();
        assert_eq!(wizard.advance(), WizardStep::Verify);
    }

    #[test]
    fn details_reachable_iff_damage_detected() {
        let mut wizard = Wizard::new();
        let token = wizard.select_photo();
        wizard.advance();

        // Negative verdict keeps the gate closed.
        assert!(wizard.apply_validation(token, Ok(&no_damage())));
        assert!(!wizard.can_submit_details());
        assert_eq!(wizard.advance(), WizardStep::Verify);

        // Re-selecting the photo and getting a positive verdict opens it.
        let token = wizard.select_photo();
        assert!(wizard.apply_validation(token, Ok(&detected("Crack"))));
        assert!(wizard.can_submit_details());
        assert_eq!(wizard.advance(), WizardStep::Details);
    }

    #[test]
    fn backend_error_blocks_progression() {
        let mut wizard = Wizard::new();
        let token = wizard.select_photo();
        wizard.advance();

        assert!(wizard.apply_validation(token, Err(())));
        assert!(wizard.backend_error());
        assert!(!wizard.can_submit_details());
        assert_eq!(wizard.advance(), WizardStep::Verify);
    }

    #[test]
    fn stale_validation_verdict_is_discarded() {
        let mut wizard = Wizard::new();
        let old = wizard.select_photo();
        let new = wizard.select_photo();

        // Verdict for the first photo arrives after the second was chosen.
        assert!(!wizard.apply_validation(old, Ok(&detected("Pothole"))));
        assert!(wizard.is_validating());

        assert!(wizard.apply_validation(new, Ok(&detected("Pothole"))));
        assert!(wizard.can_submit_details());
    }

    #[test]
    fn reselecting_clears_previous_verdict_and_error() {
        let mut wizard = Wizard::new();
        let token = wizard.select_photo();
        wizard.apply_validation(token, Err(()));
        assert!(wizard.backend_error());

        wizard.select_photo();
        assert!(!wizard.backend_error());
        assert!(wizard.ai_result().is_none());
        assert!(wizard.is_validating());
    }

    #[test]
    fn back_edge_only_exists_on_verify() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.back(), WizardStep::Upload);

        let token = wizard.select_photo();
        wizard.advance();
        assert_eq!(wizard.back(), WizardStep::Upload);
        // Photo and pending state survive the back edge.
        assert!(wizard.has_photo());

        wizard.advance();
        wizard.apply_validation(token, Ok(&detected("Pothole")));
        wizard.advance();
        assert_eq!(wizard.back(), WizardStep::Details);
    }

    #[test]
    fn prefill_uses_ai_class_with_pothole_fallback() {
        let mut wizard = Wizard::new();
        let token = wizard.select_photo();
        wizard.apply_validation(token, Ok(&detected("Water Logging")));
        assert_eq!(wizard.prefill_damage_type(), Some(DamageType::WaterLogging));

        let token = wizard.select_photo();
        wizard.apply_validation(token, Ok(&detected("longitudinal crack")));
        assert_eq!(wizard.prefill_damage_type(), Some(DamageType::Pothole));

        let token = wizard.select_photo();
        wizard.apply_validation(token, Ok(&no_damage()));
        assert_eq!(wizard.prefill_damage_type(), None);
    }

    #[test]
    fn completion_lands_on_done_with_the_receipt_id() {
        let mut wizard = Wizard::new();
        let token = wizard.select_photo();
        wizard.advance();
        wizard.apply_validation(token, Ok(&detected("Pothole")));
        wizard.advance();

        wizard.complete("A1B2C3D4".to_string());
        assert_eq!(wizard.step(), WizardStep::Done);
        assert_eq!(wizard.complaint_id(), Some("A1B2C3D4"));
        // Done is terminal.
        assert_eq!(wizard.advance(), WizardStep::Done);
        assert_eq!(wizard.back(), WizardStep::Done);
    }
}
