//! Details-form state.
//!
//! `RwSignal` fields make the struct `Copy`, so it can be handed to child
//! components as a plain prop. Retained across a failed submission so the
//! user can retry without re-entering anything.

use leptos::prelude::*;
use roadwatch_shared::DamageType;
use roadwatch_shared::location::GeoPoint;
use roadwatch_shared::protocol;
use web_sys::{File, FormData};

#[derive(Clone, Copy)]
pub struct ReportFormState {
    pub name: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub ward: RwSignal<String>,
    /// Pre-filled from the AI's class on a positive verdict; user-editable.
    pub damage_type: RwSignal<DamageType>,
    pub description: RwSignal<String>,
}

impl ReportFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            ward: RwSignal::new(String::new()),
            damage_type: RwSignal::new(DamageType::default()),
            description: RwSignal::new(String::new()),
        }
    }

    /// Required fields are non-empty. Formats are not checked.
    pub fn is_complete(&self) -> bool {
        !self.name.get_untracked().trim().is_empty()
            && !self.phone.get_untracked().trim().is_empty()
            && !self.ward.get_untracked().trim().is_empty()
    }

    /// Assemble the multipart body for `POST /api/report`: the citizen
    /// fields plus exactly one photo and one coordinate pair.
    pub fn to_form_data(&self, photo: &File, point: GeoPoint) -> Result<FormData, String> {
        let form = FormData::new().map_err(|e| format!("{e:?}"))?;

        let append = |key: &str, value: &str| {
            form.append_with_str(key, value).map_err(|e| format!("{e:?}"))
        };
        append(protocol::FIELD_NAME, &self.name.get_untracked())?;
        append(protocol::FIELD_PHONE, &self.phone.get_untracked())?;
        append(protocol::FIELD_WARD, &self.ward.get_untracked())?;
        append(
            protocol::FIELD_DAMAGE_TYPE,
            self.damage_type.get_untracked().as_str(),
        )?;
        append(protocol::FIELD_DESCRIPTION, &self.description.get_untracked())?;
        append(protocol::FIELD_LATITUDE, &point.lat.to_string())?;
        append(protocol::FIELD_LONGITUDE, &point.lng.to_string())?;

        form.append_with_blob(protocol::FIELD_IMAGE, photo)
            .map_err(|e| format!("{e:?}"))?;

        Ok(form)
    }
}

impl Default for ReportFormState {
    fn default() -> Self {
        Self::new()
    }
}
