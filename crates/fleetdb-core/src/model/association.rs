use crate::model::entity::EntityModel;

///
/// AssociationModel
///
/// A declared to-one association reachable from grid column paths.
/// The set is fixed per entity; arbitrary traversal is not permitted.
///

#[derive(Debug)]
pub struct AssociationModel {
    /// Segment name as it appears in dotted column identifiers.
    pub name: &'static str,
    /// Model of the joined entity.
    pub target: &'static EntityModel,
}
