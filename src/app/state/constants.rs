use std::time::Duration;

/// Cadence of UI-side polling subscriptions.
pub(crate) const SCANNER_POLL_INTERVAL: Duration = Duration::from_millis(50);
pub(crate) const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) const CAMERA_ERROR_MESSAGE: &str =
    "Impossible d'accéder à la caméra. Veuillez vérifier les permissions.";
pub(crate) const SCANNER_TITLE: &str = "Scanner un QR Code";
pub(crate) const SCANNER_WAITING: &str = "Recherche d'un QR code…";
pub(crate) const SHARE_TITLE: &str = "Scannez ce QR Code";
pub(crate) const SHARE_HINT: &str =
    "Scannez ce QR code pour ouvrir cette application sur votre appareil";
pub(crate) const CLOSE_LABEL: &str = "Fermer";
pub(crate) const FOOTER_LABEL: &str = "A project by AYATI LINK";

pub(crate) const DAY_MODE_LABEL: &str = "Mode jour";
pub(crate) const NIGHT_MODE_LABEL: &str = "Mode nuit";
pub(crate) const VERSE_LABEL: &str = "Verset";
pub(crate) const PREVIOUS_LABEL: &str = "Précédent";
pub(crate) const NEXT_LABEL: &str = "Suivant";
pub(crate) const PLAY_LABEL: &str = "Lecture";
pub(crate) const PAUSE_LABEL: &str = "Pause";
pub(crate) const MUTE_LABEL: &str = "Couper le son";
pub(crate) const UNMUTE_LABEL: &str = "Activer le son";
pub(crate) const SHARE_BUTTON_LABEL: &str = "QR Code";
pub(crate) const SCANNER_BUTTON_LABEL: &str = "Scanner";

/// Edge length of the scanner preview in the overlay.
pub(crate) const SCANNER_PREVIEW_PX: f32 = 320.0;
