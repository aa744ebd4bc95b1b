use super::{Command, CommandOutput};
use crate::error::Result;
use crate::heading::HeadingSource;
use crate::narrator::describe;
use crate::session::Session;

pub struct Show;

impl Command for Show {
    fn name(&self) -> &str {
        "SHOW"
    }
    fn description(&self) -> &str {
        "Display pipeline state"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let state = session.controller.state();
        let absent = || "-".to_string();

        let mut rows = vec![
            vec![
                "Location".to_string(),
                state.coordinate.map_or_else(absent, |c| c.to_string()),
            ],
            vec![
                "Heading".to_string(),
                state
                    .heading
                    .map_or_else(absent, |h| format!("{} ({})", h, session.heading.kind())),
            ],
        ];

        if let Some(position) = &state.position {
            rows.push(vec![
                "Azimuth".to_string(),
                format!("{:.4} rad from S", position.azimuth.radians()),
            ]);
            rows.push(vec![
                "Altitude".to_string(),
                format!("{:.2}°", position.altitude.degrees()),
            ]);
            rows.push(vec![
                "Distance".to_string(),
                format!("{:.0} km", position.distance_km),
            ]);
        }
        rows.push(vec![
            "Bearing".to_string(),
            session
                .moon_bearing()?
                .map_or_else(absent, |b| format!("{:.1}°", b)),
        ]);
        rows.push(vec![
            "Rotation".to_string(),
            state.rotation.map_or_else(absent, |r| r.to_string()),
        ]);
        rows.push(vec![
            "Visibility".to_string(),
            state
                .visibility
                .as_ref()
                .map_or_else(absent, |w| describe(w).to_string()),
        ]);
        rows.push(vec![
            "Clock".to_string(),
            session.controller.clock().now().to_rfc3339(),
        ]);

        Ok(CommandOutput::Table {
            headers: vec!["Quantity".to_string(), "Value".to_string()],
            rows,
        })
    }
}
