mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use button_light_engine::color::BLACK;
    use button_light_engine::input::TrySendError;
    use button_light_engine::menu::{
        MENU_ENTRY_COLOR, MENU_EXIT_COLOR, MENU_FEEDBACK_COLOR,
    };
    use button_light_engine::{
        AnimationMode, ButtonEvent, DeviceProfile, Engine, EngineConfig,
        EventChannel, FrameScheduler, Instant, NavState, OutputDriver,
        ProfileConfig, Rgb,
    };

    const MAX_PIXELS: usize = 32;
    const CHANNEL_SIZE: usize = 8;

    type TestEngine<'a> = Engine<'a, MAX_PIXELS, CHANNEL_SIZE>;

    fn compact(pixel_count: usize) -> ProfileConfig {
        ProfileConfig {
            profile: DeviceProfile::Compact,
            pixel_count,
            refresh_rate_hz: 40,
        }
    }

    fn extended(pixel_count: usize) -> ProfileConfig {
        ProfileConfig {
            profile: DeviceProfile::Extended,
            pixel_count,
            refresh_rate_hz: 40,
        }
    }

    fn click(engine: &mut TestEngine<'_>, at_ms: u64) {
        engine.handle_event(ButtonEvent::ModeFall, Instant::from_millis(at_ms));
        engine.handle_event(ButtonEvent::ModeRise, Instant::from_millis(at_ms + 100));
    }

    fn long_hold(engine: &mut TestEngine<'_>, at_ms: u64) {
        engine.handle_event(ButtonEvent::ModeLongHold, Instant::from_millis(at_ms));
    }

    #[test]
    fn test_solid_single_pixel_scenario() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        let white = engine.palette().color(0);

        // Trigger not held: one black pixel.
        let frame = engine.tick(Instant::from_millis(0), false).unwrap();
        assert_eq!(frame, &[BLACK]);

        // Trigger held: one white pixel (power-on main color).
        let frame = engine.tick(Instant::from_millis(25), true).unwrap();
        assert_eq!(frame, &[white]);
    }

    #[test]
    fn test_tick_is_throttled_to_refresh_rate() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        assert!(engine.tick(Instant::from_millis(0), false).is_some());
        assert!(engine.tick(Instant::from_millis(1), false).is_none());
        assert!(engine.tick(Instant::from_millis(24), false).is_none());
        assert!(engine.tick(Instant::from_millis(25), false).is_some());
    }

    #[test]
    fn test_channel_events_apply_within_tick() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let sender = channel.sender();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        sender.try_send(ButtonEvent::ModeLongHold).unwrap();
        engine.tick(Instant::from_millis(0), false);
        assert_eq!(engine.nav_state(), NavState::SelectMode);
    }

    #[test]
    fn test_channel_click_across_ticks() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let sender = channel.sender();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        sender.try_send(ButtonEvent::ModeFall).unwrap();
        engine.tick(Instant::from_millis(0), false);
        sender.try_send(ButtonEvent::ModeRise).unwrap();
        engine.tick(Instant::from_millis(100), false);
        assert_eq!(engine.config().main_color_index, 1);
    }

    #[test]
    fn test_channel_overflow_drops_newest() {
        let channel: EventChannel<2> = EventChannel::new();
        let sender = channel.sender();

        assert!(sender.try_send(ButtonEvent::ModeFall).is_ok());
        assert!(sender.try_send(ButtonEvent::ModeRise).is_ok());
        assert_eq!(
            sender.try_send(ButtonEvent::TriggerFall),
            Err(TrySendError(ButtonEvent::TriggerFall))
        );

        // The queued events survive the failed send.
        assert_eq!(channel.try_receive(), Ok(ButtonEvent::ModeFall));
        assert_eq!(channel.try_receive(), Ok(ButtonEvent::ModeRise));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn test_menu_entry_banner_then_clear() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        long_hold(&mut engine, 0);

        // Banner fills the frame for ~500 ms.
        let frame = engine.tick(Instant::from_millis(0), false).unwrap();
        assert_eq!(frame, &[MENU_ENTRY_COLOR]);
        let frame = engine.tick(Instant::from_millis(25), false).unwrap();
        assert_eq!(frame, &[MENU_ENTRY_COLOR]);

        // At the deadline the banner retires with one clearing frame.
        let frame = engine.tick(Instant::from_millis(500), false).unwrap();
        assert_eq!(frame, &[BLACK]);
    }

    #[test]
    fn test_menu_exit_banner_color_differs() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        long_hold(&mut engine, 0);
        engine.tick(Instant::from_millis(500), false); // entry banner cleared
        long_hold(&mut engine, 1000);

        let frame = engine.tick(Instant::from_millis(1000), false).unwrap();
        assert_eq!(frame, &[MENU_EXIT_COLOR]);
        assert_ne!(MENU_ENTRY_COLOR, MENU_EXIT_COLOR);
    }

    #[test]
    fn test_select_feedback_compact_blinks_mode_count() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        long_hold(&mut engine, 0);
        engine.tick(Instant::from_millis(500), false); // retire the banner

        // Solid is mode 0: a single 125 ms pulse at the top of each second.
        let frame = engine.tick(Instant::from_millis(2000), false).unwrap();
        assert_eq!(frame, &[MENU_FEEDBACK_COLOR]);
        let frame = engine.tick(Instant::from_millis(2150), false).unwrap();
        assert_eq!(frame, &[BLACK]);
        let frame = engine.tick(Instant::from_millis(2250), false).unwrap();
        assert_eq!(frame, &[BLACK]);
        let frame = engine.tick(Instant::from_millis(3000), false).unwrap();
        assert_eq!(frame, &[MENU_FEEDBACK_COLOR]);
    }

    #[test]
    fn test_select_feedback_compact_second_mode_pulses_twice() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        long_hold(&mut engine, 0);
        engine.tick(Instant::from_millis(500), false); // retire the banner
        click(&mut engine, 600); // Fade, mode index 1

        // Two pulses: lit in slots 0 and 2, dark in slots 1 and 3+.
        let frame = engine.tick(Instant::from_millis(2060), false).unwrap();
        assert_eq!(frame, &[MENU_FEEDBACK_COLOR]);
        let frame = engine.tick(Instant::from_millis(2190), false).unwrap();
        assert_eq!(frame, &[BLACK]);
        let frame = engine.tick(Instant::from_millis(2310), false).unwrap();
        assert_eq!(frame, &[MENU_FEEDBACK_COLOR]);
        let frame = engine.tick(Instant::from_millis(2700), false).unwrap();
        assert_eq!(frame, &[BLACK]);
    }

    #[test]
    fn test_select_feedback_extended_lights_every_fourth_pixel() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: extended(30),
            },
        );

        long_hold(&mut engine, 0);
        engine.tick(Instant::from_millis(500), false); // retire the banner
        click(&mut engine, 600); // Fade
        click(&mut engine, 800); // Blink, mode index 2

        let frame = engine.tick(Instant::from_millis(1000), false).unwrap();
        for (i, led) in frame.iter().enumerate() {
            let expected = if i == 0 || i == 4 || i == 8 {
                MENU_FEEDBACK_COLOR
            } else {
                BLACK
            };
            assert_eq!(*led, expected, "pixel {i}");
        }
    }

    #[test]
    fn test_bicolor_scenario_extended() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: extended(10),
            },
        );

        long_hold(&mut engine, 0);
        for k in 0..5u64 {
            click(&mut engine, 600 + k * 300); // through to Bicolor
        }
        assert_eq!(engine.config().mode, AnimationMode::Bicolor);
        long_hold(&mut engine, 4000);
        assert_eq!(engine.nav_state(), NavState::Run);

        engine.tick(Instant::from_millis(4500), true); // exit banner clears
        let main = engine.palette().color(0);
        let secondary = engine.palette().color(1);
        let frame = engine.tick(Instant::from_millis(4525), true).unwrap();
        assert_eq!(&frame[..5], &[main; 5]);
        assert_eq!(&frame[5..], &[secondary; 5]);
    }

    #[test]
    fn test_configure_preview_dispatches_to_selected_mode() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let mut engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );

        long_hold(&mut engine, 0);
        click(&mut engine, 600); // Fade
        click(&mut engine, 800); // Blink
        click(&mut engine, 1000); // Alternate
        engine.handle_event(ButtonEvent::TriggerFall, Instant::from_millis(1200));
        assert_eq!(engine.nav_state(), NavState::ConfigureParameter);

        let main = engine.palette().color(0);
        engine.tick(Instant::from_millis(1300), false); // banner clearing frame
        // Alternate previews the active slot color: main, power-on white.
        let frame = engine.tick(Instant::from_millis(1325), false).unwrap();
        assert_eq!(frame, &[main]);
        let frame = engine.tick(Instant::from_millis(1625), false).unwrap();
        assert_eq!(frame, &[BLACK]);
    }

    #[derive(Clone, Default)]
    struct CapturingDriver {
        frames: Rc<RefCell<Vec<Vec<Rgb>>>>,
    }

    impl OutputDriver for CapturingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.borrow_mut().push(colors.to_vec());
        }
    }

    #[test]
    fn test_frame_scheduler_writes_only_produced_frames() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );
        let driver = CapturingDriver::default();
        let frames = Rc::clone(&driver.frames);
        let mut scheduler = FrameScheduler::new(engine, driver);

        let result = scheduler.tick(Instant::from_millis(0), false);
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(result.next_deadline, Instant::from_millis(25));
        assert_eq!(result.sleep_duration.as_millis(), 25);

        // Between refresh ticks the engine holds fire; nothing is written.
        scheduler.tick(Instant::from_millis(5), false);
        assert_eq!(frames.borrow().len(), 1);

        scheduler.tick(Instant::from_millis(50), false);
        assert_eq!(frames.borrow().len(), 2);
        assert_eq!(frames.borrow()[1], vec![BLACK]);
    }

    #[test]
    fn test_frame_scheduler_drift_correction() {
        let channel: EventChannel<CHANNEL_SIZE> = EventChannel::new();
        let engine = TestEngine::new(
            channel.receiver(),
            &EngineConfig {
                profile: compact(1),
            },
        );
        let mut scheduler = FrameScheduler::new(engine, CapturingDriver::default());

        scheduler.tick(Instant::from_millis(0), false);
        // A long stall resets the schedule to "now" instead of bursting.
        let result = scheduler.tick(Instant::from_millis(10_000), false);
        assert_eq!(result.next_deadline, Instant::from_millis(10_025));
    }
}
