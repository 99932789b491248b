use crate::controllers::interactive::events::render::RenderEvent;

pub trait RenderWorkerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
