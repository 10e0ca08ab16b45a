use serde::Deserialize;
use validator::Validate;

use crate::domain::medicine::{NewMedicine, UpdateMedicine};

#[derive(Deserialize, Validate)]
/// Form data for creating a medicine. The code is generated server-side.
pub struct CreateMedicineForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub family_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub composition: Option<String>,
    #[validate(length(max = 1000))]
    pub indications: Option<String>,
}

#[derive(Deserialize, Validate)]
/// Form data for updating a medicine; the code becomes editable here.
pub struct UpdateMedicineForm {
    #[validate(length(min = 1, max = 20))]
    pub code: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub family_id: Option<i32>,
    #[validate(length(max = 1000))]
    pub composition: Option<String>,
    #[validate(length(max = 1000))]
    pub indications: Option<String>,
}

impl From<&CreateMedicineForm> for NewMedicine {
    fn from(form: &CreateMedicineForm) -> Self {
        NewMedicine::new(
            form.name.clone(),
            form.family_id,
            form.composition.clone(),
            form.indications.clone(),
        )
    }
}

impl From<&UpdateMedicineForm> for UpdateMedicine {
    fn from(form: &UpdateMedicineForm) -> Self {
        UpdateMedicine::new(
            form.code.clone(),
            form.name.clone(),
            form.family_id,
            form.composition.clone(),
            form.indications.clone(),
        )
    }
}
