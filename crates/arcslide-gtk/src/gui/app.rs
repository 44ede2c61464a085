use crate::config::{self, ConfigError};
use crate::events::AppEvent;
use crate::gui::{theme, view};
use arcslide::{CircularSlider, Point, Size, geometry};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub slider: Rc<RefCell<CircularSlider>>,
    pub value_text: String,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

pub struct AppInit {
    pub slider: CircularSlider,
    pub size: f64,
    pub events: async_channel::Receiver<AppEvent>,
}

#[derive(Debug)]
pub enum AppMsg {
    Pressed(Point),
    Moved(Point),
    Released,
    Cancelled,
    Resized(Size),
    ValueChanged(f64),
    Close,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn format_value(value: f64) -> String {
    format!("{:.0}", value)
}

/// Maps a widget-space point into the slider's unrotated frame.
fn to_local(slider: &CircularSlider, point: Point) -> Point {
    geometry::rotate_about(point, slider.center(), -slider.rotational_transform())
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Arcslide"),
            add_css_class: "arcslide-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "arcslide-drawing-area",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resized(Size::new(f64::from(width), f64::from(height))));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::Pressed(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::Moved(Point::new(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |_, _, _| {
                            sender.input(AppMsg::Released);
                        },
                        connect_cancel[sender] => move |_, _| {
                            sender.input(AppMsg::Cancelled);
                        }
                    }
                },

                gtk::Label {
                    add_css_class: "arcslide-value",
                    #[watch]
                    set_label: &model.value_text,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            mut slider,
            size,
            events,
        } = init;

        theme::load_css();
        root.set_default_size(size as i32, size as i32 + 48);

        let listener_sender = sender.clone();
        slider.on_value_changed(move |value| {
            listener_sender.input(AppMsg::ValueChanged(value));
        });

        let model = AppModel {
            value_text: format_value(slider.current_value()),
            slider: Rc::new(RefCell::new(slider)),
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let slider_draw = model.slider.clone();
        widgets.drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &slider_draw.borrow()) {
                log::error!("Drawing error: {}", e);
            }
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Pressed(point) => {
                let mut slider = self.slider.borrow_mut();
                let local = to_local(&slider, point);
                if slider.pointer_down(local) {
                    log::debug!("Drag started at {:?}", local);
                }
            }
            AppMsg::Moved(point) => {
                let mut slider = self.slider.borrow_mut();
                let local = to_local(&slider, point);
                match slider.pointer_moved(local) {
                    Ok(action) if action.should_redraw => self.drawing_area.queue_draw(),
                    Ok(_) => {}
                    Err(e) => log::error!("Failed to track pointer: {}", e),
                }
            }
            AppMsg::Released => self.slider.borrow_mut().pointer_up(),
            AppMsg::Cancelled => self.slider.borrow_mut().pointer_cancelled(),
            AppMsg::Resized(size) => {
                self.slider.borrow_mut().set_bounds(size);
            }
            AppMsg::ValueChanged(value) => {
                self.value_text = format_value(value);
            }
            AppMsg::Close => self.root.close(),
            AppMsg::ConfigReload => {
                let reloaded = config::load_config().and_then(|new_config| {
                    self.slider
                        .borrow_mut()
                        .apply_config(new_config.slider_config())
                        .map_err(ConfigError::from)
                });
                match reloaded {
                    Ok(()) => log::info!("Configuration reloaded"),
                    Err(e) => log::error!("Failed to reload config: {}", e),
                }
            }
        }

        if self.slider.borrow_mut().take_needs_display() {
            self.drawing_area.queue_draw();
        }
    }
}
