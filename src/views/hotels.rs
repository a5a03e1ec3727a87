use crate::api::{CustomerAPI, DynAPI};
use crate::entities::{Hotel, Room};
use crate::notify::Notifier;
use crate::store::Collection;
use crate::views::Scope;

/// Customer-facing hotel search with a detail pane. Search never touches
/// the server; it filters the loaded list on every keystroke.
pub struct HotelSearch {
    api: DynAPI,
    notices: Notifier,
    scope: Scope,
    hotels: Collection<Hotel>,
    query: String,
    selected: Option<Hotel>,
    rooms: Collection<Room>,
}

impl HotelSearch {
    pub fn new(api: DynAPI, notices: Notifier) -> Self {
        Self {
            api,
            notices,
            scope: Scope::new(),
            hotels: Collection::new(),
            query: String::new(),
            selected: None,
            rooms: Collection::new(),
        }
    }

    pub fn hotels(&self) -> &Collection<Hotel> {
        &self.hotels
    }

    pub fn selected(&self) -> Option<&Hotel> {
        self.selected.as_ref()
    }

    pub fn rooms(&self) -> &Collection<Room> {
        &self.rooms
    }

    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) {
        self.hotels.begin_load();

        match self.scope.run(self.api.list_hotels()).await {
            Ok(hotels) => self.hotels.complete_load(hotels),
            Err(err) => {
                self.hotels.fail_load();
                self.notices
                    .failure(format!("could not load hotels: {}", err.message));
            }
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.into();
    }

    pub fn visible(&self) -> Vec<&Hotel> {
        self.hotels.filtered(&self.query)
    }

    #[tracing::instrument(skip(self))]
    pub async fn open_detail(&mut self, id: i64) {
        let detail = self.scope.run(self.api.find_hotel(id)).await;

        match detail {
            Ok(hotel) => self.selected = Some(hotel),
            Err(err) => {
                self.notices
                    .failure(format!("could not load hotel: {}", err.message));
                return;
            }
        }

        self.rooms.begin_load();

        match self.scope.run(self.api.list_hotel_rooms(id)).await {
            Ok(rooms) => self.rooms.complete_load(rooms),
            Err(err) => {
                self.rooms.fail_load();
                self.notices
                    .failure(format!("could not load rooms: {}", err.message));
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.rooms = Collection::new();
    }
}
