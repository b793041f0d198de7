use super::{DocumentWriter, ScenarioDocument};
use crate::config::DocumentationConfig;
use crate::scenarios::Scenario;
use std::io::Write;

/// Writes a `.feature` document: header comments, then scenarios grouped by feature
pub struct GherkinWriter<W: Write> {
    writer: W,
    include_timestamp: bool,
    include_test_metadata: bool,
}

impl<W: Write> GherkinWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, &DocumentationConfig::default())
    }

    pub fn with_options(writer: W, config: &DocumentationConfig) -> Self {
        Self {
            writer,
            include_timestamp: config.include_timestamp,
            include_test_metadata: config.include_test_metadata,
        }
    }

    fn write_header(&mut self, document: &ScenarioDocument<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", document.title)?;
        writeln!(
            self.writer,
            "# Proyecto: {} v{}",
            document.project.name, document.project.version
        )?;
        if self.include_timestamp {
            writeln!(
                self.writer,
                "# Generado: {}",
                document.stats.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }
        writeln!(self.writer, "# Escenarios: {}", document.stats.total_scenarios)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_feature(&mut self, feature: &str, scenarios: &[&Scenario]) -> anyhow::Result<()> {
        if !feature.trim().is_empty() {
            writeln!(self.writer, "Feature: {feature}")?;
            writeln!(self.writer)?;
        }

        for scenario in scenarios {
            if self.include_test_metadata {
                writeln!(
                    self.writer,
                    "  # {}:{}",
                    scenario.file_path, scenario.line_number
                )?;
            }
            if !scenario.tags.is_empty() {
                let tags: Vec<String> = scenario.tags.iter().map(|t| format!("@{t}")).collect();
                writeln!(self.writer, "  {}", tags.join(" "))?;
            }
            writeln!(self.writer, "{}", scenario.scenario_block())?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Scenarios grouped by feature, features in first-seen order
fn group_by_feature(scenarios: &[Scenario]) -> Vec<(&str, Vec<&Scenario>)> {
    let mut groups: Vec<(&str, Vec<&Scenario>)> = Vec::new();
    for scenario in scenarios {
        match groups.iter_mut().find(|(f, _)| *f == scenario.feature) {
            Some((_, members)) => members.push(scenario),
            None => groups.push((scenario.feature.as_str(), vec![scenario])),
        }
    }
    groups
}

impl<W: Write> DocumentWriter for GherkinWriter<W> {
    fn write_document(&mut self, document: &ScenarioDocument<'_>) -> anyhow::Result<()> {
        self.write_header(document)?;
        for (feature, scenarios) in group_by_feature(document.scenarios) {
            self.write_feature(feature, &scenarios)?;
        }
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "feature"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::ProjectInfo;
    use crate::scenarios::extract_scenarios;
    use indoc::indoc;
    use std::path::Path;

    fn render(config: &DocumentationConfig, source: &str) -> String {
        let scenarios = extract_scenarios(Path::new("tests/rules/login-rules.spec.ts"), source).unwrap();
        let project = ProjectInfo::default();
        let document = ScenarioDocument::new("Escenarios de reglas", &project, &scenarios);

        let mut buffer = Vec::new();
        GherkinWriter::with_options(&mut buffer, config)
            .write_document(&document)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    const SOURCE: &str = indoc! {r#"
        test.describe('Login', () => {
          test('Uno', async () => { await homePage.goto(); });
          test('Dos', async () => { await homePage.goto(); });
        });
    "#};

    #[test]
    fn test_groups_scenarios_under_one_feature() {
        let text = render(&DocumentationConfig::default(), SOURCE);

        assert_eq!(text.matches("Feature: Login").count(), 1);
        assert!(text.contains(
            "  Scenario: Uno\n    Given el usuario se encuentra en la aplicación\n    When el usuario navega a la página de inicio"
        ));
        assert!(text.contains("  # tests/rules/login-rules.spec.ts:2"));
        assert!(text.contains("# Escenarios: 2"));
        assert!(text.contains("# Generado: "));
    }

    #[test]
    fn test_options_turn_off_comments() {
        let config = DocumentationConfig {
            include_timestamp: false,
            include_test_metadata: false,
            ..DocumentationConfig::default()
        };
        let text = render(&config, SOURCE);

        assert!(!text.contains("# Generado"));
        assert!(!text.contains("login-rules.spec.ts:"));
    }
}
