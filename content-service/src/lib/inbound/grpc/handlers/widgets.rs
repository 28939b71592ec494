use auth::ClaimsIdentity;
use tonic::Status;

use crate::domain::content::errors::ContentError;
use crate::domain::content::models::WidgetDescription;
use crate::domain::content::models::WidgetId;
use crate::domain::content::ports::ContentServicePort;
use crate::proto::AddWidgetForUserRequest;
use crate::proto::AddWidgetForUserResponse;
use crate::proto::CreateWidgetRequest;
use crate::proto::CreateWidgetResponse;
use crate::proto::DeleteWidgetForUserRequest;
use crate::proto::DeleteWidgetForUserResponse;
use crate::proto::GetWidgetsResponse;

pub async fn get_all_widgets<S: ContentServicePort>(
    service: &S,
) -> Result<GetWidgetsResponse, Status> {
    let widgets = service.all_widgets().await?;

    Ok(GetWidgetsResponse {
        widgets: widgets.into_iter().map(Into::into).collect(),
    })
}

pub async fn get_user_widgets<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
) -> Result<GetWidgetsResponse, Status> {
    let widgets = service.user_widgets(caller).await?;

    Ok(GetWidgetsResponse {
        widgets: widgets.into_iter().map(Into::into).collect(),
    })
}

pub async fn create_widget<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
    request: CreateWidgetRequest,
) -> Result<CreateWidgetResponse, Status> {
    let description = WidgetDescription::new(request.description).map_err(ContentError::from)?;
    let widget = service.create_widget(caller, description).await?;

    Ok(CreateWidgetResponse {
        widget: Some(widget.into()),
    })
}

pub async fn add_widget_for_user<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
    request: AddWidgetForUserRequest,
) -> Result<AddWidgetForUserResponse, Status> {
    let widget_id = WidgetId::new(request.widget_id).map_err(ContentError::from)?;
    service.add_widget_for_user(caller, widget_id).await?;

    Ok(AddWidgetForUserResponse {
        response: format!(
            "Successfully added widget ({}) for user ({})",
            widget_id, caller.id
        ),
    })
}

pub async fn delete_widget_for_user<S: ContentServicePort>(
    service: &S,
    caller: &ClaimsIdentity,
    request: DeleteWidgetForUserRequest,
) -> Result<DeleteWidgetForUserResponse, Status> {
    let widget_id = WidgetId::new(request.widget_id).map_err(ContentError::from)?;
    service.remove_widget_for_user(caller, widget_id).await?;

    Ok(DeleteWidgetForUserResponse {
        response: format!(
            "Successfully removed widget ({}) for user ({})",
            widget_id, caller.id
        ),
    })
}
