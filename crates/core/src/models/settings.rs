//! Booking page settings

use serde::{Deserialize, Serialize};

/// Operator-editable settings for the public booking page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSettings {
    /// Greeting shown at the top of the wizard
    pub welcome_message: String,
    /// Where the public form is published
    pub public_form_url: String,
    pub contact_phone: Option<String>,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            welcome_message: "Bienvenido al sistema de turnos ODYSSEY. Selecciona el día \
                              y horario que mejor te convenga."
                .to_string(),
            public_form_url: "https://odyssey.com.ar/reservar-turno".to_string(),
            contact_phone: None,
        }
    }
}
