//! Collection use case
//!
//! Pass 1 writes a unit for every function, type and value; pass 2
//! appends every method to its receiver's unit. Both passes run in module
//! order and any error aborts the whole collection.

use tracing::{debug, info, warn};

use crate::config::{CollisionPolicy, ImplicitRepetition, SplitConfig};
use crate::features::parsing::domain::Module;
use crate::features::splitting::domain::{Declaration, UnitSet};
use crate::features::splitting::infrastructure::{
    build_header, special_filename, DeclarationClassifier, MethodResolver, UnitWriter,
};
use crate::shared::models::{Result, SplitError};

pub struct CollectionOrchestrator {
    collision: CollisionPolicy,
    implicit_repetition: ImplicitRepetition,
    classifier: DeclarationClassifier,
    resolver: MethodResolver,
}

impl CollectionOrchestrator {
    pub fn new(config: &SplitConfig) -> Self {
        Self::with_policies(config.collision, config.implicit_repetition)
    }

    pub fn with_policies(
        collision: CollisionPolicy,
        implicit_repetition: ImplicitRepetition,
    ) -> Self {
        Self {
            collision,
            implicit_repetition,
            classifier: DeclarationClassifier::new(),
            resolver: MethodResolver::new(),
        }
    }

    /// Build every output unit of `module`
    pub fn collect(&self, module: &Module) -> Result<UnitSet> {
        let header = build_header(module);
        let decls = self.classifier.classify(module)?;
        let (methods, placed): (Vec<_>, Vec<_>) =
            decls.into_iter().partition(Declaration::is_method);

        info!(
            "package {}: {} declarations, {} methods",
            module.package_name,
            placed.len(),
            methods.len()
        );

        let writer = UnitWriter::new(&header);
        let mut units = UnitSet::new();
        for decl in &placed {
            self.check_repetition(decl)?;

            let unit = writer.write(decl)?;
            let filename = unit.filename.clone();
            if let Some(previous) = units.get(&filename) {
                match self.collision {
                    CollisionPolicy::Reject => {
                        return Err(SplitError::FilenameCollision {
                            filename,
                            previous: previous.owner.clone(),
                            current: decl.name().to_string(),
                        });
                    }
                    CollisionPolicy::Overwrite => warn!(
                        "{} replaces {} in {}",
                        decl.name(),
                        previous.owner,
                        filename
                    ),
                }
            }
            debug!(
                "{} {} (line {}) -> {}",
                decl.kind_str(),
                decl.name(),
                decl.span().start_line,
                filename
            );
            if let Some(special) = special_filename(&filename) {
                warn!("{} {} -> {}: {}", decl.kind_str(), decl.name(), filename, special);
            }
            units.insert(unit);
        }

        for decl in &methods {
            if let Declaration::Method(method) = decl {
                let filename = self.resolver.append(method, &mut units)?;
                debug!("method {} -> {}", method.name, filename);
            }
        }

        info!("collected {} units", units.len());
        Ok(units)
    }

    fn check_repetition(&self, decl: &Declaration) -> Result<()> {
        let Declaration::Value(value) = decl else {
            return Ok(());
        };
        if !value.implicit_repetition {
            return Ok(());
        }
        match self.implicit_repetition {
            ImplicitRepetition::Reject => Err(SplitError::ImplicitRepetition {
                name: value.name.clone(),
            }),
            ImplicitRepetition::Elide => {
                warn!(
                    "constant {} repeats the previous value implicitly; written without it",
                    value.name
                );
                Ok(())
            }
        }
    }
}
