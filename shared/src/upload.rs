use crate::xray::{BodyArea, PredictionResult};

pub const BACKEND_FAILURE_NOTICE: &str = "Backend connection failed";

/// Transient state of the X-ray page. `F` is whatever handle the platform
/// uses for a picked file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadSelection<F> {
    area: Option<BodyArea>,
    file: Option<F>,
    busy: bool,
    result: Option<PredictionResult>,
}

impl<F> Default for UploadSelection<F> {
    fn default() -> Self {
        Self {
            area: None,
            file: None,
            busy: false,
            result: None,
        }
    }
}

impl<F: Clone> UploadSelection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_area(&mut self, area: BodyArea) {
        self.area = Some(area);
    }

    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
    }

    pub fn area(&self) -> Option<BodyArea> {
        self.area
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn can_scan(&self) -> bool {
        self.file.is_some() && !self.busy
    }

    /// Marks the selection busy and hands back what to submit. Returns `None`
    /// without touching any state when either the file or the area is missing.
    pub fn begin(&mut self) -> Option<(BodyArea, F)> {
        let area = self.area?;
        let file = self.file.clone()?;
        self.busy = true;
        Some((area, file))
    }

    /// Clears the busy flag whatever the outcome. A failure keeps the previous
    /// result and yields the single notice to show the user.
    pub fn finish<E>(&mut self, outcome: Result<PredictionResult, E>) -> Option<&'static str> {
        self.busy = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(_) => Some(BACKEND_FAILURE_NOTICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xray::{Assessment, PredictionResponse};

    fn submit(
        selection: &mut UploadSelection<String>,
        calls: &mut usize,
        reply: Result<f64, &'static str>,
    ) -> Vec<&'static str> {
        let mut notices = Vec::new();
        if let Some((_area, _file)) = selection.begin() {
            *calls += 1;
            let outcome = reply.and_then(|confidence| {
                PredictionResponse { confidence }
                    .into_result()
                    .ok_or("malformed")
            });
            notices.extend(selection.finish(outcome));
        }
        notices
    }

    #[test]
    fn no_file_means_no_request() {
        let mut selection = UploadSelection::<String>::new();
        selection.select_area(BodyArea::Lungs);
        let mut calls = 0;

        let notices = submit(&mut selection, &mut calls, Ok(0.9));

        assert_eq!(calls, 0);
        assert!(notices.is_empty());
        assert!(!selection.is_busy());
        assert!(selection.result().is_none());
    }

    #[test]
    fn no_area_means_no_request() {
        let mut selection = UploadSelection::new();
        selection.select_file("chest.png".to_string());
        let mut calls = 0;

        submit(&mut selection, &mut calls, Ok(0.9));

        assert_eq!(calls, 0);
        assert!(!selection.is_busy());
    }

    #[test]
    fn begin_sets_busy_and_returns_selection() {
        let mut selection = UploadSelection::new();
        selection.select_area(BodyArea::Bones);
        selection.select_file("wrist.jpg".to_string());

        let submitted = selection.begin();

        assert_eq!(submitted, Some((BodyArea::Bones, "wrist.jpg".to_string())));
        assert!(selection.is_busy());
        assert!(!selection.can_scan());
    }

    #[test]
    fn network_failure_clears_busy_and_notifies_once() {
        let mut selection = UploadSelection::new();
        selection.select_area(BodyArea::Kidney);
        selection.select_file("scan.png".to_string());
        let mut calls = 0;

        let notices = submit(&mut selection, &mut calls, Err("connection refused"));

        assert_eq!(calls, 1);
        assert_eq!(notices, vec![BACKEND_FAILURE_NOTICE]);
        assert!(!selection.is_busy());
    }

    #[test]
    fn failure_keeps_previous_result() {
        let mut selection = UploadSelection::new();
        selection.select_area(BodyArea::Lungs);
        selection.select_file("chest.png".to_string());
        let mut calls = 0;

        submit(&mut selection, &mut calls, Ok(0.5));
        let before = selection.result().copied();
        submit(&mut selection, &mut calls, Err("timeout"));

        assert_eq!(calls, 2);
        assert_eq!(selection.result().copied(), before);
        assert_eq!(before.map(|r| r.assessment), Some(Assessment::Inconclusive));
    }

    #[test]
    fn success_replaces_result() {
        let mut selection = UploadSelection::new();
        selection.select_area(BodyArea::Lungs);
        selection.select_file("chest.png".to_string());
        let mut calls = 0;

        submit(&mut selection, &mut calls, Ok(0.1));
        submit(&mut selection, &mut calls, Ok(0.9));

        let result = selection.result().unwrap();
        assert_eq!(result.assessment, Assessment::HighLikelihood);
        assert_eq!(result.confidence, 0.9);
        assert!(selection.can_scan());
    }

    #[test]
    fn malformed_response_counts_as_failure() {
        let mut selection = UploadSelection::new();
        selection.select_area(BodyArea::Lungs);
        selection.select_file("chest.png".to_string());
        let mut calls = 0;

        let notices = submit(&mut selection, &mut calls, Ok(f64::NAN));

        assert_eq!(notices.len(), 1);
        assert!(selection.result().is_none());
    }
}
