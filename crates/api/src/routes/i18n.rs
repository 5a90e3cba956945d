//! Translation bundle endpoint handlers.
//!
//! Serves the full message bundle for a language in one response.
//! Unknown languages fall back to English; a key missing from a bundle
//! falls back to English and finally to the key itself, so the client
//! never renders an empty label.

use axum::{extract::Path, Json};
use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashMap};

/// Keys included in every translation bundle.
const MESSAGE_KEYS: [&str; 39] = [
    "hello",
    "zones",
    "back",
    "add_zone",
    "add_first_zone",
    "add_another",
    "go_to_zones",
    "zone_name",
    "zone_address",
    "zone_radius",
    "zone_icon",
    "zone_notifications",
    "zone_created",
    "zone_created_description",
    "step_1_of_4",
    "step_2_of_4",
    "step_3_of_4",
    "step_4_of_4",
    "next",
    "save",
    "cancel",
    "zone_name_placeholder",
    "zone_address_placeholder",
    "choose_icon",
    "set_location",
    "set_zone_area",
    "choose_devices",
    "radius_range",
    "current_radius",
    "adjust_radius",
    "zones_empty_title",
    "zones_empty_description",
    "zones_empty_benefit1",
    "zones_empty_benefit2",
    "device_phone",
    "device_watch",
    "device_band",
    "enable_notifications",
    "notification_tip",
];

lazy_static! {
    static ref EN: HashMap<&'static str, &'static str> = HashMap::from([
        ("hello", "Hello"),
        ("zones", "Zones"),
        ("back", "Back"),
        ("add_zone", "Add zone"),
        ("add_first_zone", "Add your first zone"),
        ("add_another", "Add another"),
        ("go_to_zones", "Go to zones"),
        ("zone_name", "Zone name"),
        ("zone_address", "Zone address"),
        ("zone_radius", "Zone radius"),
        ("zone_icon", "Zone icon"),
        ("zone_notifications", "Zone notifications"),
        ("zone_created", "Zone created"),
        ("zone_created_description", "Your zone has been created and is now active."),
        ("step_1_of_4", "Step 1 of 4"),
        ("step_2_of_4", "Step 2 of 4"),
        ("step_3_of_4", "Step 3 of 4"),
        ("step_4_of_4", "Step 4 of 4"),
        ("next", "Next"),
        ("save", "Save"),
        ("cancel", "Cancel"),
        ("zone_name_placeholder", "e.g. Home"),
        ("zone_address_placeholder", "Enter an address"),
        ("choose_icon", "Choose an icon"),
        ("set_location", "Set the location"),
        ("set_zone_area", "Set the zone area"),
        ("choose_devices", "Choose devices"),
        ("radius_range", "50 m - 50 km"),
        ("current_radius", "Current radius"),
        ("adjust_radius", "Adjust the radius"),
        ("zones_empty_title", "No zones yet"),
        ("zones_empty_description", "Create a zone to get notified when devices enter or leave it."),
        ("zones_empty_benefit1", "Know when your family arrives home"),
        ("zones_empty_benefit2", "Get an alert when a device leaves school"),
        ("device_phone", "Phone"),
        ("device_watch", "Watch"),
        ("device_band", "Band"),
        ("enable_notifications", "Enable notifications"),
        ("notification_tip", "You can change this later in the zone settings."),
    ]);

    static ref PL: HashMap<&'static str, &'static str> = HashMap::from([
        ("hello", "Cześć"),
        ("zones", "Strefy"),
        ("back", "Wstecz"),
        ("add_zone", "Dodaj strefę"),
        ("add_first_zone", "Dodaj pierwszą strefę"),
        ("add_another", "Dodaj kolejną"),
        ("go_to_zones", "Przejdź do stref"),
        ("zone_name", "Nazwa strefy"),
        ("zone_address", "Adres strefy"),
        ("zone_radius", "Promień strefy"),
        ("zone_icon", "Ikona strefy"),
        ("zone_notifications", "Powiadomienia strefy"),
        ("zone_created", "Strefa utworzona"),
        ("zone_created_description", "Twoja strefa została utworzona i jest aktywna."),
        ("step_1_of_4", "Krok 1 z 4"),
        ("step_2_of_4", "Krok 2 z 4"),
        ("step_3_of_4", "Krok 3 z 4"),
        ("step_4_of_4", "Krok 4 z 4"),
        ("next", "Dalej"),
        ("save", "Zapisz"),
        ("cancel", "Anuluj"),
        ("zone_name_placeholder", "np. Dom"),
        ("zone_address_placeholder", "Wpisz adres"),
        ("choose_icon", "Wybierz ikonę"),
        ("set_location", "Ustaw lokalizację"),
        ("set_zone_area", "Ustaw obszar strefy"),
        ("choose_devices", "Wybierz urządzenia"),
        ("radius_range", "50 m - 50 km"),
        ("current_radius", "Aktualny promień"),
        ("adjust_radius", "Dostosuj promień"),
        ("zones_empty_title", "Brak stref"),
        ("zones_empty_description", "Utwórz strefę, aby otrzymywać powiadomienia, gdy urządzenia do niej wchodzą lub ją opuszczają."),
        ("zones_empty_benefit1", "Wiedz, kiedy rodzina wraca do domu"),
        ("zones_empty_benefit2", "Otrzymaj alert, gdy urządzenie opuści szkołę"),
        ("device_phone", "Telefon"),
        ("device_watch", "Zegarek"),
        ("device_band", "Opaska"),
        ("enable_notifications", "Włącz powiadomienia"),
        ("notification_tip", "Możesz to później zmienić w ustawieniach strefy."),
    ]);

    static ref DE: HashMap<&'static str, &'static str> = HashMap::from([
        ("hello", "Hallo"),
        ("zones", "Zonen"),
        ("back", "Zurück"),
        ("add_zone", "Zone hinzufügen"),
        ("add_first_zone", "Erste Zone hinzufügen"),
        ("add_another", "Weitere hinzufügen"),
        ("go_to_zones", "Zu den Zonen"),
        ("zone_name", "Zonenname"),
        ("zone_address", "Zonenadresse"),
        ("zone_radius", "Zonenradius"),
        ("zone_icon", "Zonensymbol"),
        ("zone_notifications", "Zonenbenachrichtigungen"),
        ("zone_created", "Zone erstellt"),
        ("zone_created_description", "Ihre Zone wurde erstellt und ist jetzt aktiv."),
        ("step_1_of_4", "Schritt 1 von 4"),
        ("step_2_of_4", "Schritt 2 von 4"),
        ("step_3_of_4", "Schritt 3 von 4"),
        ("step_4_of_4", "Schritt 4 von 4"),
        ("next", "Weiter"),
        ("save", "Speichern"),
        ("cancel", "Abbrechen"),
        ("zone_name_placeholder", "z. B. Zuhause"),
        ("zone_address_placeholder", "Adresse eingeben"),
        ("choose_icon", "Symbol auswählen"),
        ("set_location", "Standort festlegen"),
        ("set_zone_area", "Zonenbereich festlegen"),
        ("choose_devices", "Geräte auswählen"),
        ("radius_range", "50 m - 50 km"),
        ("current_radius", "Aktueller Radius"),
        ("adjust_radius", "Radius anpassen"),
        ("zones_empty_title", "Noch keine Zonen"),
        ("zones_empty_description", "Erstellen Sie eine Zone, um benachrichtigt zu werden, wenn Geräte sie betreten oder verlassen."),
        ("zones_empty_benefit1", "Wissen, wann Ihre Familie zu Hause ankommt"),
        ("zones_empty_benefit2", "Alarm erhalten, wenn ein Gerät die Schule verlässt"),
        ("device_phone", "Telefon"),
        ("device_watch", "Uhr"),
        ("device_band", "Armband"),
        ("enable_notifications", "Benachrichtigungen aktivieren"),
        ("notification_tip", "Sie können dies später in den Zoneneinstellungen ändern."),
    ]);
}

/// Table for a language tag, defaulting to English.
fn table_for(language: &str) -> &'static HashMap<&'static str, &'static str> {
    match language.to_lowercase().as_str() {
        "pl" => &PL,
        "de" => &DE,
        _ => &EN,
    }
}

/// Assembles the bundle for a language with per-key fallback.
fn translations(language: &str) -> BTreeMap<&'static str, &'static str> {
    let table = table_for(language);
    MESSAGE_KEYS
        .into_iter()
        .map(|key| {
            let value = table
                .get(key)
                .or_else(|| EN.get(key))
                .copied()
                .unwrap_or(key);
            (key, value)
        })
        .collect()
}

/// Translation bundle for a language.
///
/// GET /api/v1/i18n/:lang
pub async fn get_translations(
    Path(language): Path<String>,
) -> Json<BTreeMap<&'static str, &'static str>> {
    Json(translations(&language))
}
