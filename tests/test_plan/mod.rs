use std::fs;
use std::io;
use std::path::Path;

use pretty_assertions::assert_eq;

use yarn_loom::*;

/// One line of a `.testplan` file.
#[derive(Debug, PartialEq)]
pub enum PlanStep {
    Node(String),
    Tags(String),
    Position(f64, f64),
    Color(u32),
    Body(String),
    Link(String),
    Stop,
}

impl PlanStep {
    fn new(line: &str) -> Self {
        let (step, value) = match line.split_once(':') {
            Some((step, value)) => (step, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };
        match step {
            "node" => Self::Node(value.to_owned()),
            "tags" => Self::Tags(value.to_owned()),
            "position" => {
                let (x, y) = value.split_once(',')
                    .unwrap_or_else(|| panic!("Expected \"x, y\" in line \"{}\"", line));
                Self::Position(x.trim().parse().unwrap(), y.trim().parse().unwrap())
            }
            "color" => Self::Color(value.trim().parse().unwrap()),
            "body" => Self::Body(value.to_owned()),
            "link" => Self::Link(value.to_owned()),
            "stop" => Self::Stop,
            step => panic!(
                "Could not parse test plan step \"{}\" in line \"{}\"",
                step, line
            ),
        }
    }
}

/// The nodes a `.yarn` file is expected to parse into.
pub struct TestPlan {
    steps: Vec<PlanStep>,
}

impl TestPlan {
    pub fn load(plan_path: &Path) -> io::Result<Self> {
        let plan_text = fs::read_to_string(plan_path)?;
        let steps = plan_text
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
            .map(PlanStep::new)
            .collect();

        Ok(Self { steps })
    }

    /// Builds the expected nodes. Unmentioned fields keep their defaults and a
    /// node with no `link` steps expects no links at all.
    pub fn expected_nodes(&self) -> Vec<YarnNode> {
        let mut nodes: Vec<YarnNode> = Vec::new();

        for step in &self.steps {
            if let PlanStep::Node(title) = step {
                nodes.push(YarnNode::new(title.as_str()));
                continue;
            }
            if let PlanStep::Stop = step {
                break;
            }

            let node = nodes.last_mut()
                .unwrap_or_else(|| panic!("{:?} must come after a node step", step));
            match step {
                PlanStep::Tags(tags) => node.tags = tags.clone(),
                PlanStep::Position(x, y) => node.position = Some(Position::new(*x, *y)),
                PlanStep::Color(index) => node.color_id = Some(ColorId::Index(*index)),
                PlanStep::Body(line) => {
                    node.body.push_str(line);
                    node.body.push('\n');
                }
                PlanStep::Link(title) => node.links.get_or_insert_with(Vec::new).push(title.clone()),
                PlanStep::Node(_) | PlanStep::Stop => unreachable!(),
            }
        }

        nodes
    }
}

pub struct PlanRunner {
    source: String,
    plan: TestPlan,
    options: ParseOptions,
}

impl PlanRunner {
    pub fn new(yarn_path: &str) -> Self {
        let _ = pretty_env_logger::try_init();

        let yarn_path = Path::new(yarn_path);
        let source = fs::read_to_string(yarn_path).unwrap();
        let plan = TestPlan::load(&yarn_path.with_extension("testplan")).unwrap();

        Self {
            source,
            plan,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self) -> YarnDocument {
        let document = YarnDocument::parse_with(&self.source, &self.options);
        assert_eq!(document.nodes(), self.plan.expected_nodes().as_slice());

        // Whatever was parsed must survive being written back out.
        let rewritten = YarnDocument::parse(&document.to_string());
        assert_eq!(rewritten, document);

        document
    }
}
