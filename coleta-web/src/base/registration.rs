use std::collections::BTreeSet;

/// Free-text fields of the registration form. Values pass through to the
/// backend verbatim, empty strings included - there is no client-side
/// required-field validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Whatsapp,
}

impl RegistrationFields {
    /// Replaces exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Whatsapp => self.whatsapp = value,
        }
    }
}

/// Selected recycling-item ids. Membership is the only semantic; the
/// ordered set keeps the wire serialization stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSelection {
    ids: BTreeSet<u32>,
}

impl ItemSelection {
    pub fn toggle(&mut self, id: u32) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Comma-joined id list as submitted in the `items` multipart field.
    pub fn to_field(&self) -> String {
        self.ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Snapshot of the form state taken at submit time, minus the optional
/// image file which is appended separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPayload {
    pub registration: RegistrationFields,
    pub uf: String,
    pub city: String,
    pub position: LatLng,
    pub items: ItemSelection,
}

impl PointPayload {
    /// Multipart fields in submission order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.registration.name.clone()),
            ("email", self.registration.email.clone()),
            ("whatsapp", self.registration.whatsapp.clone()),
            ("UF", self.uf.clone()),
            ("city", self.city.clone()),
            ("latitude", self.position.lat.to_string()),
            ("longitude", self.position.lng.to_string()),
            ("items", self.items.to_field()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_single_field() {
        let mut fields = RegistrationFields::default();

        fields.set(Field::Name, "Mercado Verde".to_string());
        assert_eq!(fields.name, "Mercado Verde");
        assert_eq!(fields.email, "");
        assert_eq!(fields.whatsapp, "");

        fields.set(Field::Email, "contato@verde.com".to_string());
        fields.set(Field::Whatsapp, "11999990000".to_string());
        assert_eq!(fields.name, "Mercado Verde");
        assert_eq!(fields.email, "contato@verde.com");
        assert_eq!(fields.whatsapp, "11999990000");
    }

    #[test]
    fn test_toggle_keeps_odd_clicked_ids() {
        let mut selection = ItemSelection::default();

        // 1 twice, 2 three times, 3 once, 4 twice
        for id in [1, 2, 1, 3, 2, 4, 2, 4] {
            selection.toggle(id);
        }

        assert!(!selection.contains(1));
        assert!(selection.contains(2));
        assert!(selection.contains(3));
        assert!(!selection.contains(4));
    }

    #[test]
    fn test_to_field_joins_ids_ascending() {
        let mut selection = ItemSelection::default();
        selection.toggle(5);
        selection.toggle(2);
        assert_eq!(selection.to_field(), "2,5");

        selection.toggle(5);
        assert_eq!(selection.to_field(), "2");
    }

    #[test]
    fn test_to_field_empty_selection() {
        assert_eq!(ItemSelection::default().to_field(), "");
    }

    #[test]
    fn test_payload_fields_order_and_values() {
        let mut payload = PointPayload::default();
        payload.registration.set(Field::Name, "Eco Ponto".to_string());
        payload.uf = "SP".to_string();
        payload.city = "Santos".to_string();
        payload.position = LatLng::new(-23.5, -46.6);
        payload.items.toggle(2);
        payload.items.toggle(5);

        assert_eq!(
            payload.fields(),
            vec![
                ("name", "Eco Ponto".to_string()),
                ("email", String::new()),
                ("whatsapp", String::new()),
                ("UF", "SP".to_string()),
                ("city", "Santos".to_string()),
                ("latitude", "-23.5".to_string()),
                ("longitude", "-46.6".to_string()),
                ("items", "2,5".to_string()),
            ]
        );
    }

    #[test]
    fn test_payload_fields_empty_form() {
        // unfilled form still submits every field, as empty strings
        let fields = PointPayload::default().fields();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], ("name", String::new()));
        assert_eq!(fields[5], ("latitude", "0".to_string()));
        assert_eq!(fields[6], ("longitude", "0".to_string()));
        assert_eq!(fields[7], ("items", String::new()));
    }
}
