//! Running a spread's interactive action against whatever hosts the zine.

use crate::content::InteractiveAction;
use crate::flash::{ColorFlash, Rgba};
use rand::Rng;
use tracing::{debug, warn};

/// Side effects an interactive button can trigger.
pub trait InteractionHost {
    fn alert(&mut self, message: &str);
    fn flash(&mut self, flash: ColorFlash);
    fn open_link(&mut self, url: &str);
}

impl InteractiveAction {
    pub fn dispatch<H, R>(&self, host: &mut H, rng: &mut R)
    where
        H: InteractionHost + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            InteractiveAction::Alert { message } => {
                debug!("Interactive alert");
                host.alert(message);
            }
            InteractiveAction::Flash { palette } => {
                let colors: Vec<Rgba> = palette
                    .iter()
                    .filter_map(|hex| Rgba::parse_hex(hex).ok())
                    .collect();
                match ColorFlash::random_from(&colors, rng) {
                    Some(flash) => host.flash(flash),
                    None => warn!("Flash action has no usable colours"),
                }
            }
            InteractiveAction::OpenLink { url } => {
                debug!(url = %url, "Interactive link");
                host.open_link(url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct Recorder {
        alerts: Vec<String>,
        flashes: Vec<ColorFlash>,
        links: Vec<String>,
    }

    impl InteractionHost for Recorder {
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn flash(&mut self, flash: ColorFlash) {
            self.flashes.push(flash);
        }

        fn open_link(&mut self, url: &str) {
            self.links.push(url.to_string());
        }
    }

    #[test]
    fn alert_reaches_host() {
        let mut host = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        InteractiveAction::Alert {
            message: "hello".into(),
        }
        .dispatch(&mut host, &mut rng);
        assert_eq!(host.alerts, vec!["hello".to_string()]);
        assert!(host.flashes.is_empty());
    }

    #[test]
    fn flash_picks_palette_colour() {
        let mut host = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        InteractiveAction::Flash {
            palette: vec!["#00ff00".into()],
        }
        .dispatch(&mut host, &mut rng);
        assert_eq!(host.flashes.len(), 1);
        assert_eq!(host.flashes[0].color(), Rgba::parse_hex("#00ff00").unwrap());
    }

    #[test]
    fn empty_palette_does_nothing() {
        let mut host = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        InteractiveAction::Flash { palette: vec![] }.dispatch(&mut host, &mut rng);
        assert!(host.flashes.is_empty());
    }

    #[test]
    fn link_is_forwarded() {
        let mut host = Recorder::default();
        let mut rng = StdRng::seed_from_u64(1);
        InteractiveAction::OpenLink {
            url: "https://example.org".into(),
        }
        .dispatch(&mut host, &mut rng);
        assert_eq!(host.links, vec!["https://example.org".to_string()]);
    }
}
