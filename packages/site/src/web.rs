use std::rc::Rc;

use folio_document::WebDocument;
use folio_history::{scroll_window_to, WebHistory};
use folio_router::prelude::*;

use crate::{Page, Site, SiteError};

fn apply(navigation: &Navigation<Page>) {
    if let Some(position) = navigation.scroll {
        scroll_window_to(position);
    }
}

impl Site {
    /// Attach to the browser: route the current location, keep the head in sync and follow
    /// back/forward navigation.
    ///
    /// `on_navigate` is called with the page to render after every navigation, the first one
    /// included.
    pub fn launch_web(
        &self,
        on_navigate: impl Fn(Page) + 'static,
    ) -> Result<Rc<Router<Page>>, SiteError> {
        if let Err(err) = folio_logger::init(folio_logger::Level::INFO) {
            tracing::debug!("{err}");
        }

        let history = Rc::new(WebHistory::new()?);
        let document = WebDocument::get().ok_or(SiteError::NoDocument)?;
        let router = Rc::new(self.router(history, document));

        let on_navigate = Rc::new(on_navigate);
        let render = on_navigate.clone();
        router.listen(move |navigation| match navigation {
            Ok(navigation) => {
                apply(&navigation);
                render(*navigation.to().view());
            }
            Err(err) => tracing::error!("navigation failed: {err}"),
        });

        let navigation = router.start()?;
        apply(&navigation);
        on_navigate(*navigation.to().view());

        Ok(router)
    }
}
